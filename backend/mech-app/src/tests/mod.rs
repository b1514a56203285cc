mod analysis;
mod logger;
mod upload;
