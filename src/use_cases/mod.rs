pub mod request_match;

#[cfg(test)]
pub(crate) mod test_support;
