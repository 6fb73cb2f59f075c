pub mod plans;
pub mod run;
