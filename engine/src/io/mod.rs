pub mod audio;
pub mod input;
pub mod render;

pub use audio::{AudioSink, Sound};
pub use input::{InputEvent, InputSource, Key};
pub use render::{Frame, MenuView, PlayView, RenderSink, ShopView, SnakeView};
