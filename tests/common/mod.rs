pub use ganttplan_test_utils::init_tracing;
