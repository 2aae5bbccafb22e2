pub mod review_search;
pub mod reviews_list;
