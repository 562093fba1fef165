
mod edge_case_tests;
mod sequence_tests;
