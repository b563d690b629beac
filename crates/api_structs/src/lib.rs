mod status;
mod widget;

pub mod dtos {
    pub use crate::widget::dtos::*;
}

pub use crate::status::api::*;
pub use crate::widget::api::*;
