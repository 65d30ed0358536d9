// Example consumers of the panel engine

pub mod button;
pub mod progress_bar;
pub mod text_list;

pub use button::Button;
pub use progress_bar::{ProgressBar, ProgressColors};
pub use text_list::{Paragraph, TextList};
