pub mod data_shape_error;
