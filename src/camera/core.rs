use glam::{DAffine3, DVec3};

/// Narrowest and widest view angles accepted, in degrees.
const VIEW_ANGLE_RANGE: (f64, f64) = (0.000_000_01, 179.0);

/// Perspective camera defined by eye position, focal point and view-up.
///
/// Angles taken by the rotation methods are in degrees. None of them
/// re-orthogonalize the view-up; call
/// [`orthogonalize_view_up`](Self::orthogonalize_view_up) after a change
/// of direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: DVec3,
    /// Look-at point.
    pub focal_point: DVec3,
    /// Up direction vector.
    pub view_up: DVec3,
    /// Vertical field of view in degrees.
    pub view_angle: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DVec3::new(0.0, 0.0, 1.0), DVec3::ZERO, DVec3::Y)
    }
}

impl Camera {
    /// Camera at `position` looking at `focal_point`.
    #[must_use]
    pub fn new(position: DVec3, focal_point: DVec3, view_up: DVec3) -> Self {
        Self {
            position,
            focal_point,
            view_up,
            view_angle: 30.0,
        }
    }

    /// Unit vector from the eye towards the focal point.
    #[must_use]
    pub fn direction_of_projection(&self) -> DVec3 {
        (self.focal_point - self.position).normalize_or_zero()
    }

    /// Move eye and focal point together.
    pub fn translate(&mut self, delta: DVec3) {
        self.position += delta;
        self.focal_point += delta;
    }

    /// Turn the focal point about the view-up axis through the eye.
    pub fn yaw(&mut self, degrees: f64) {
        self.focal_point =
            rotate_point(self.focal_point, self.position, self.view_up, degrees);
    }

    /// Tilt the focal point about the camera's right axis through the eye.
    pub fn pitch(&mut self, degrees: f64) {
        let right = self.direction_of_projection().cross(self.view_up);
        self.focal_point =
            rotate_point(self.focal_point, self.position, right, degrees);
        self.view_up = rotate_vector(self.view_up, right, degrees);
    }

    /// Spin the view-up about the direction of projection.
    pub fn roll(&mut self, degrees: f64) {
        self.view_up =
            rotate_vector(self.view_up, self.direction_of_projection(), degrees);
    }

    /// Orbit the eye about the view-up axis through the focal point.
    pub fn azimuth(&mut self, degrees: f64) {
        self.position =
            rotate_point(self.position, self.focal_point, self.view_up, degrees);
    }

    /// Make view-up perpendicular to the direction of projection.
    ///
    /// Leaves view-up alone when the two are parallel.
    pub fn orthogonalize_view_up(&mut self) {
        let dop = self.direction_of_projection();
        let up = (self.view_up - dop * dop.dot(self.view_up)).normalize_or_zero();
        if up != DVec3::ZERO {
            self.view_up = up;
        }
    }

    /// Set the view angle, clamped to a usable range.
    pub fn set_view_angle(&mut self, degrees: f64) {
        self.view_angle = degrees.clamp(VIEW_ANGLE_RANGE.0, VIEW_ANGLE_RANGE.1);
    }
}

/// Rotate `point` about `axis` through `pivot`.
///
/// A degenerate axis leaves the point where it is.
#[must_use]
pub fn rotate_point(point: DVec3, pivot: DVec3, axis: DVec3, degrees: f64) -> DVec3 {
    let Some(axis) = axis.try_normalize() else {
        return point;
    };
    let xform = DAffine3::from_translation(pivot)
        * DAffine3::from_axis_angle(axis, degrees.to_radians())
        * DAffine3::from_translation(-pivot);
    xform.transform_point3(point)
}

fn rotate_vector(v: DVec3, axis: DVec3, degrees: f64) -> DVec3 {
    rotate_point(v, DVec3::ZERO, axis, degrees)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn looking_down_z() -> Camera {
        Camera::new(DVec3::new(0.0, 0.0, 5.0), DVec3::new(0.0, 0.0, 4.0), DVec3::Y)
    }

    #[test]
    fn direction_of_projection_points_at_focal_point() {
        let cam = looking_down_z();
        assert!((cam.direction_of_projection() - DVec3::NEG_Z).length() < EPS);
        assert!((cam.position.distance(cam.focal_point) - 1.0).abs() < EPS);
    }

    #[test]
    fn yaw_turns_about_view_up_and_keeps_eye() {
        let mut cam = looking_down_z();
        cam.yaw(90.0);
        assert!((cam.position - DVec3::new(0.0, 0.0, 5.0)).length() < EPS);
        assert!((cam.direction_of_projection() - DVec3::NEG_X).length() < EPS);
    }

    #[test]
    fn pitch_carries_view_up_along() {
        let mut cam = looking_down_z();
        cam.pitch(90.0);
        assert!((cam.direction_of_projection() - DVec3::Y).length() < EPS);
        assert!(cam.view_up.dot(cam.direction_of_projection()).abs() < EPS);
    }

    #[test]
    fn roll_only_changes_view_up() {
        let mut cam = looking_down_z();
        let before = cam.direction_of_projection();
        cam.roll(30.0);
        assert!((cam.direction_of_projection() - before).length() < EPS);
        assert!((cam.view_up.angle_between(DVec3::Y).to_degrees() - 30.0).abs() < 1e-6);
    }

    #[test]
    fn azimuth_orbits_eye_around_focal_point() {
        let mut cam = looking_down_z();
        let radius = cam.position.distance(cam.focal_point);
        cam.azimuth(45.0);
        assert!((cam.position.distance(cam.focal_point) - radius).abs() < EPS);
        assert_eq!(cam.focal_point, DVec3::new(0.0, 0.0, 4.0));
    }

    #[test]
    fn orthogonalize_removes_forward_component() {
        let mut cam = looking_down_z();
        cam.view_up = DVec3::new(0.0, 1.0, -1.0);
        cam.orthogonalize_view_up();
        assert!((cam.view_up - DVec3::Y).length() < EPS);
    }

    #[test]
    fn view_angle_is_clamped() {
        let mut cam = Camera::default();
        cam.set_view_angle(500.0);
        assert_eq!(cam.view_angle, 179.0);
        cam.set_view_angle(-1.0);
        assert!(cam.view_angle > 0.0);
    }

    #[test]
    fn degenerate_axis_is_a_no_op() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert_eq!(rotate_point(p, DVec3::ZERO, DVec3::ZERO, 90.0), p);
    }
}
