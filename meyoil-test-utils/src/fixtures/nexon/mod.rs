use crate::TestContext;

pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn nexon<'a>(&'a mut self) -> NexonFixtures<'a> {
        NexonFixtures { setup: self }
    }
}

pub struct NexonFixtures<'a> {
    setup: &'a mut TestContext,
}
