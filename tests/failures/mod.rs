mod missing_root_fails;
mod root_that_is_a_file_fails;
mod root_without_pairs_fails;
mod root_without_sub_folders_fails;
