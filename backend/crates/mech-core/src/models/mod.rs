pub mod account;
pub mod analysis;
pub mod captured_media;
pub mod media_source_kind;
pub mod new_profile;
pub mod permission_status;
pub mod player_card;
pub mod profile;
pub mod session;
pub mod upload_kind;
pub mod upload_record;
