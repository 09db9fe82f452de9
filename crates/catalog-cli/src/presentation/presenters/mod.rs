pub mod catalog;

pub use catalog::{
    present_add_result, present_card, present_catalog, present_clear_result,
    present_delete_result, present_guidance, present_list,
};
