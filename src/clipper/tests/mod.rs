mod clipper_offset_tests;
mod config_tests;
mod intersect_node_tests;
mod local_minima_tests;
mod out_rec_tests;
mod scanbeam_tests;
mod utils_tests;
