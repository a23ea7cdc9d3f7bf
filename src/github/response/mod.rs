mod review_response;

pub use review_response::Review;
