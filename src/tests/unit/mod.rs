mod catalog_files;
mod sort_modes;
mod viewport_sync;
