mod card;
mod info_block;
mod lazy_video;
mod splash;

pub use card::Card;
pub use info_block::InfoBlock;
pub use lazy_video::LazyVideo;
pub use splash::Splash;
