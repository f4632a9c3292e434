mod curp_validation_flow;
