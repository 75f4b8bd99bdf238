//! Sprite sheet frame animation for egor
//!
//! ```
//! use egor_animator::{AnimatorConfig, FrameAnimator, SheetTexture};
//!
//! let mut anim = FrameAnimator::new("walk", 4, 2, AnimatorConfig::new(8));
//! anim.bind_sheet(SheetTexture::new(0, 256, 128));
//! anim.start();
//!
//! // once per rendered frame
//! anim.advance(1.0 / 60.0, 60);
//! let rect = anim.frame_rect().unwrap();
//! assert_eq!(rect.size.x, 64.0);
//! ```

mod animator;
pub mod config;
pub mod error;
pub mod math;
pub mod sheet;
pub mod time;

pub use animator::FrameAnimator;
pub use config::{AnimatorConfig, SheetChange};
pub use error::{AnimError, Axis};
pub use sheet::{Grid, SheetTexture};
pub use time::FrameClock;
