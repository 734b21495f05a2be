/// Progress sink for the generator
///
/// `start` opens a transient indicator that the next `succeed` or `fail`
/// resolves. `succeed`/`fail` without a preceding `start` are plain messages.
pub trait Reporter {
    fn start(&mut self, message: &str);
    fn succeed(&mut self, message: &str);
    fn fail(&mut self, message: &str);
    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn start(&mut self, message: &str) {
        (**self).start(message)
    }

    fn succeed(&mut self, message: &str) {
        (**self).succeed(message)
    }

    fn fail(&mut self, message: &str) {
        (**self).fail(message)
    }

    fn info(&mut self, message: &str) {
        (**self).info(message)
    }

    fn warn(&mut self, message: &str) {
        (**self).warn(message)
    }
}
