pub(crate) enum Frame<T> {
    Node { value: T, next: Box<Frame<T>> },
    Sentinel,
}

impl<T> Frame<T> {
    pub(crate) fn link(value: T, next: Frame<T>) -> Self {
        Frame::Node {
            value,
            next: Box::new(next),
        }
    }

    pub(crate) fn is_sentinel(&self) -> bool {
        matches!(self, Frame::Sentinel)
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match self {
            Frame::Node { value, .. } => Some(value),
            Frame::Sentinel => None,
        }
    }

    // The sentinel is its own successor.
    pub(crate) fn next(&self) -> &Frame<T> {
        match self {
            Frame::Node { next, .. } => &**next,
            Frame::Sentinel => self,
        }
    }

    pub(crate) fn unlink(self) -> Option<(T, Frame<T>)> {
        match self {
            Frame::Node { value, next } => Some((value, *next)),
            Frame::Sentinel => None,
        }
    }

    pub(crate) fn frames(&self) -> Frames<'_, T> {
        Frames { current: self }
    }
}

pub(crate) struct Frames<'a, T> {
    current: &'a Frame<T>,
}

impl<'a, T> Iterator for Frames<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current;
        if current.is_sentinel() {
            return None;
        }
        self.current = current.next();
        current.value()
    }
}
