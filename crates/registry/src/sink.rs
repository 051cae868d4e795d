use implbridge_primitives::ImplementorSet;

/// The consumer hook a trait page attaches to a [`Bridge`](crate::Bridge).
///
/// `register` receives ownership of each delivered set. It may be called with
/// a multi-library batch (the staged flush) or a one-entry set (a late
/// publish); merging across libraries is the implementor's job.
pub trait ImplementorSink: Send + Sync {
	fn register(&self, set: ImplementorSet);
}

impl<F> ImplementorSink for F
where
	F: Fn(ImplementorSet) + Send + Sync,
{
	fn register(&self, set: ImplementorSet) {
		self(set)
	}
}
