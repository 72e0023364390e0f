pub mod batch;
pub mod flow;
pub mod platform;
pub mod report;
pub mod scenario;
pub mod sim;
pub mod train;

#[cfg(test)]
mod test;
