//! Application state module

mod content;
mod counters;
mod forms;
mod lightbox;
mod loading;
mod navigator;
mod notification;
mod scroll;
mod section;
mod timing;
mod ui_area;

pub use content::*;
pub use counters::*;
pub use forms::*;
pub use lightbox::*;
pub use loading::*;
pub use navigator::*;
pub use notification::*;
pub use scroll::*;
pub use section::*;
pub use timing::*;
pub use ui_area::*;
