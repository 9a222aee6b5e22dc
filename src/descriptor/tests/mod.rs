mod tests_paths;
mod tests_types;
