#[derive(Clone, Debug, Default)]
pub struct UsersProcessorConfig {}
