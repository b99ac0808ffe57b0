use crate::client::Generator;
use crate::input::Fixture;
use crate::pipeline::PipelineError;

pub fn generate_sample<G>(
    generator: &G,
    index: usize,
    fixture: &Fixture,
) -> Result<String, PipelineError>
where
    G: Generator + ?Sized,
{
    tracing::debug!(index, model = generator.model(), "generating");
    let generated = generator
        .generate(&fixture.input)
        .map_err(|source| PipelineError::Generate { index, source })?;
    // Implementations are expected to trim already; stubs may not.
    Ok(generated.trim().to_string())
}
