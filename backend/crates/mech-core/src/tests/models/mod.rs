mod analysis;
mod media_source_kind;
mod player_card;
mod profile;
mod session;
mod upload_kind;
