pub mod element;
pub mod event;
pub mod query;
pub mod types;

pub use element::{find_element, find_element_mut, Content, Element};
pub use event::Event;
pub use query::{
    descendants_by_class, descendants_by_tag, descendants_by_tag_and_class, first_by_tag,
    first_by_tag_mut, text_width,
};
pub use types::*;
