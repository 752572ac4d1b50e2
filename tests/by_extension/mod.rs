mod folder_with_single_file_is_skipped;
mod latin1_pair_is_compared_after_fallback;
mod log_is_written_to_custom_directory;
