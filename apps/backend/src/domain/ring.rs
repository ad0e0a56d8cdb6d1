//! Ring topology: predecessor/successor over a game's ordered players.

/// The two ring neighbours of a member. In a ring of one both are the member itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbors<T> {
    pub predecessor: T,
    pub successor: T,
}

impl<T> Neighbors<T> {
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Neighbors<U> {
        Neighbors {
            predecessor: f(self.predecessor),
            successor: f(self.successor),
        }
    }
}

/// Borrowed view of ring members in ring order.
#[derive(Debug, Clone, Copy)]
pub struct Ring<'a, T> {
    members: &'a [T],
}

impl<'a, T> Ring<'a, T> {
    pub fn new(members: &'a [T]) -> Self {
        Self { members }
    }

    /// Neighbours of the member at `index`, `None` if out of range.
    pub fn neighbors_at(&self, index: usize) -> Option<Neighbors<&'a T>> {
        let n = self.members.len();
        if index >= n {
            return None;
        }
        Some(Neighbors {
            predecessor: &self.members[(index + n - 1) % n],
            successor: &self.members[(index + 1) % n],
        })
    }

    /// Neighbours of the first member matching `is_target`, `None` if not a member.
    pub fn neighbors_of(&self, is_target: impl Fn(&T) -> bool) -> Option<Neighbors<&'a T>> {
        let index = self.members.iter().position(is_target)?;
        self.neighbors_at(index)
    }
}
