use glam::{I64Vec2, IVec2};
use itertools::Itertools;

use crate::error::RobotError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];
}

/// The toroidal floor the robots patrol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lobby {
    width: i32,
    height: i32,
}

impl Default for Lobby {
    fn default() -> Self {
        Self {
            width: 101,
            height: 103,
        }
    }
}

impl Lobby {
    pub fn new(width: i32, height: i32) -> Result<Self, RobotError> {
        if width <= 0 || height <= 0 {
            return Err(RobotError::InvalidLobby { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> IVec2 {
        IVec2::new(self.width, self.height)
    }

    /// Seconds after which every robot is back where it started.
    pub fn period(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Folds an unbounded position back onto the floor.
    pub fn wrap(&self, position: I64Vec2) -> IVec2 {
        position.rem_euclid(self.size().as_i64vec2()).as_ivec2()
    }

    pub fn contains(&self, position: IVec2) -> bool {
        position.x >= 0 && position.y >= 0 && position.x < self.width && position.y < self.height
    }

    /// Robots on the middle row or column are in no quadrant.
    pub fn quadrant(&self, position: IVec2) -> Option<Quadrant> {
        let mid = self.size() / 2;
        let odd = IVec2::new(self.width % 2, self.height % 2);

        let left = position.x < mid.x;
        let right = position.x >= mid.x + odd.x;
        let top = position.y < mid.y;
        let bottom = position.y >= mid.y + odd.y;

        match (left, right, top, bottom) {
            (true, _, true, _) => Some(Quadrant::TopLeft),
            (_, true, true, _) => Some(Quadrant::TopRight),
            (true, _, _, true) => Some(Quadrant::BottomLeft),
            (_, true, _, true) => Some(Quadrant::BottomRight),
            _ => None,
        }
    }

    /// Product of the number of robots in each quadrant.
    pub fn safety_factor(&self, positions: impl IntoIterator<Item = IVec2>) -> usize {
        let counts = positions
            .into_iter()
            .filter_map(|position| self.quadrant(position))
            .counts();

        Quadrant::ALL
            .iter()
            .map(|quadrant| counts.get(quadrant).copied().unwrap_or(0))
            .product()
    }

    /// Draws the floor: `.` for empty tiles, otherwise the number of robots
    /// on the tile (capped at 9).
    pub fn render(&self, positions: &[IVec2]) -> String {
        let counts = positions.iter().counts();

        (0..self.height)
            .map(|y| {
                (0..self.width)
                    .map(|x| match counts.get(&IVec2::new(x, y)) {
                        None => '.',
                        Some(&count) => char::from_digit(count.min(9) as u32, 10).unwrap_or('#'),
                    })
                    .collect::<String>()
            })
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_lobby_rejects_empty_floor() {
        assert!(Lobby::new(0, 7).is_err());
        assert!(Lobby::new(11, -1).is_err());
        assert!(Lobby::new(11, 7).is_ok());
    }

    #[rstest]
    #[case(IVec2::new(0, 0), Some(Quadrant::TopLeft))]
    #[case(IVec2::new(4, 2), Some(Quadrant::TopLeft))]
    #[case(IVec2::new(6, 0), Some(Quadrant::TopRight))]
    #[case(IVec2::new(0, 4), Some(Quadrant::BottomLeft))]
    #[case(IVec2::new(10, 6), Some(Quadrant::BottomRight))]
    #[case(IVec2::new(5, 0), None)]
    #[case(IVec2::new(0, 3), None)]
    #[case(IVec2::new(5, 3), None)]
    fn test_quadrant_odd_lobby(#[case] position: IVec2, #[case] expected: Option<Quadrant>) {
        let lobby = Lobby::new(11, 7).unwrap();
        assert_eq!(expected, lobby.quadrant(position));
    }

    #[test]
    fn test_quadrant_even_lobby_has_no_midline() {
        let lobby = Lobby::new(4, 4).unwrap();

        assert_eq!(Some(Quadrant::TopLeft), lobby.quadrant(IVec2::new(1, 1)));
        assert_eq!(Some(Quadrant::BottomRight), lobby.quadrant(IVec2::new(2, 2)));
    }

    #[test]
    fn test_wrap() {
        let lobby = Lobby::new(11, 7).unwrap();

        assert_eq!(IVec2::new(10, 6), lobby.wrap(I64Vec2::new(-1, -1)));
        assert_eq!(IVec2::new(0, 0), lobby.wrap(I64Vec2::new(11, 7)));
        assert_eq!(IVec2::new(3, 2), lobby.wrap(I64Vec2::new(25, 16)));
        assert_eq!(
            IVec2::new(1, 2),
            lobby.wrap(I64Vec2::new(11 * 1_000_000_000_000 + 1, -5))
        );
    }

    #[test]
    fn test_safety_factor_needs_every_quadrant() {
        let lobby = Lobby::new(11, 7).unwrap();
        let positions = [
            IVec2::new(0, 0),
            IVec2::new(1, 1),
            IVec2::new(9, 0),
            IVec2::new(0, 6),
            IVec2::new(10, 6),
            IVec2::new(5, 5),
        ];

        assert_eq!(2, lobby.safety_factor(positions));
        assert_eq!(0, lobby.safety_factor(positions[..3].iter().copied()));
    }

    #[test]
    fn test_render() {
        let lobby = Lobby::new(3, 2).unwrap();
        let positions = [IVec2::new(0, 0), IVec2::new(2, 1), IVec2::new(2, 1)];

        assert_eq!("1..\n..2", lobby.render(&positions));
    }
}
