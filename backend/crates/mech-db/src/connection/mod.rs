pub mod directory_connection;
