/// Numbers markers for their titles. Owned by whoever issues the render calls.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct MarkerCounter(u32);

impl MarkerCounter {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn title(&self, prefix: &str) -> String {
        format!("{} {}", prefix, self.0)
    }

    pub fn next(self) -> Self {
        MarkerCounter(self.0.saturating_add(1))
    }
}
