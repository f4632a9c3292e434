mod test_curp_validation;
mod test_retry;
