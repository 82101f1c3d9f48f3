pub mod frame_pacer;
pub mod frame_timing;

pub use frame_pacer::FramePacer;
pub use frame_timing::FrameTiming;
