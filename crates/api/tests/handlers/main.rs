mod event_test;
mod middleware_test;
mod preferred_slot_test;
mod recommendation_test;
mod test_utils;
