mod run_probes;

pub use run_probes::RunProbesUseCase;
