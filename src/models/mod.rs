pub mod contact;
pub mod particles;
pub mod playback;
pub mod showcase;
