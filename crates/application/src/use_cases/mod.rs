pub mod probe;

// Re-export use cases
pub use probe::RunProbesUseCase;
