pub mod cli;
pub mod deadline;
pub mod io;
pub mod model;
pub mod store;
