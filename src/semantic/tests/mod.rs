mod helpers;
mod tests_enforcer;
mod tests_resolver;
