mod drive;
mod youtube;

pub use drive::direct_download_url;
pub use youtube::{video_id, video_thumbnail, ThumbnailQuality, VIDEO_ID_LEN};
