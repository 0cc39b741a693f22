use crate::error::RouteError;
use crate::math::Point3;

use super::{DomainSize, RoutePath, WorldScale};

/// Maps grid-space route points into scene space.
///
/// For each point:
///
/// ```text
/// X =  (x - width / 2)  * sx
/// Y = -(y - height / 2) * sy
/// Z =  z * sz
/// ```
///
/// The route is centered on the domain, and the Y axis is flipped from the
/// image convention (rows grow downward) to the scene convention. Z is
/// scaled but not recentered. Output order matches input order.
///
/// Zero or negative domain extents are accepted and give a collapsed or
/// mirrored result.
///
/// # Errors
///
/// Returns [`RouteError::LengthMismatch`] or [`RouteError::EmptyPath`]
/// before any point is transformed.
pub fn transform_path(
    path: &RoutePath,
    scale: WorldScale,
    domain: DomainSize,
) -> Result<Vec<Point3>, RouteError> {
    let count = path.point_count()?;
    if domain.is_degenerate() {
        tracing::warn!(
            width = domain.width,
            height = domain.height,
            "degenerate route domain"
        );
    }

    let half_w = 0.5 * domain.width;
    let half_h = 0.5 * domain.height;

    let mut out = Vec::with_capacity(count);
    out.extend(path.points().map(|p| {
        Point3::new(
            (p.x - half_w) * scale.x,
            -(p.y - half_h) * scale.y,
            p.z * scale.z,
        )
    }));
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn two_point_path() -> RoutePath {
        RoutePath::new(vec![0.0, 10.0], vec![0.0, 0.0], vec![0.0, 0.0])
    }

    #[test]
    fn recenters_and_flips_y() {
        let pts = transform_path(
            &two_point_path(),
            WorldScale::identity(),
            DomainSize::new(10.0, 10.0),
        )
        .unwrap();
        assert_eq!(pts, vec![Point3::new(-5.0, 5.0, 0.0), Point3::new(5.0, 5.0, 0.0)]);
    }

    #[test]
    fn scales_only_x() {
        let pts = transform_path(
            &two_point_path(),
            WorldScale::new(2.0, 1.0, 1.0),
            DomainSize::new(10.0, 10.0),
        )
        .unwrap();
        assert_eq!(
            pts,
            vec![Point3::new(-10.0, 5.0, 0.0), Point3::new(10.0, 5.0, 0.0)]
        );
    }

    #[test]
    fn identity_scale_is_plain_affine() {
        let path = RoutePath::new(
            vec![3.0, 7.5, -2.0],
            vec![1.0, 9.0, 4.25],
            vec![0.5, 8.0, -3.0],
        );
        let (w, h) = (12.0, 6.0);
        let pts = transform_path(&path, WorldScale::identity(), DomainSize::new(w, h)).unwrap();
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(p.x, path.x[i] - w / 2.0);
            assert_eq!(p.y, -(path.y[i] - h / 2.0));
            assert_eq!(p.z, path.z[i]);
        }
    }

    #[test]
    fn z_is_scaled_without_recentering() {
        let path = RoutePath::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], vec![0.1, 7.3, -4.9]);
        let scale = WorldScale::new(0.5, 0.25, 1.7);
        let pts = transform_path(&path, scale, DomainSize::new(100.0, 50.0)).unwrap();
        for (p, &z) in pts.iter().zip(&path.z) {
            assert_eq!(p.z, z * scale.z);
        }
    }

    #[test]
    fn output_length_matches_input() {
        let n = 37;
        #[allow(clippy::cast_precision_loss)]
        let xs: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let path = RoutePath::new(xs.clone(), xs.clone(), xs);
        let pts = transform_path(&path, WorldScale::identity(), DomainSize::new(4.0, 4.0)).unwrap();
        assert_eq!(pts.len(), n);
    }

    #[test]
    fn permuting_input_permutes_output() {
        let path = RoutePath::new(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0], vec![7.0, 8.0, 9.0]);
        let perm = [2, 0, 1];
        let permuted = RoutePath::new(
            perm.iter().map(|&i| path.x[i]).collect(),
            perm.iter().map(|&i| path.y[i]).collect(),
            perm.iter().map(|&i| path.z[i]).collect(),
        );
        let scale = WorldScale::new(3.0, 0.5, 2.0);
        let domain = DomainSize::new(8.0, 2.0);

        let a = transform_path(&path, scale, domain).unwrap();
        let b = transform_path(&permuted, scale, domain).unwrap();
        for (j, &i) in perm.iter().enumerate() {
            assert_eq!(b[j], a[i]);
        }
    }

    #[test]
    fn single_point_is_accepted() {
        let path = RoutePath::new(vec![4.0], vec![4.0], vec![1.0]);
        let pts = transform_path(&path, WorldScale::identity(), DomainSize::new(8.0, 8.0)).unwrap();
        assert_eq!(pts, vec![Point3::new(0.0, 0.0, 1.0)]);
    }

    #[test]
    fn zero_domain_is_accepted() {
        let pts = transform_path(
            &two_point_path(),
            WorldScale::identity(),
            DomainSize::new(0.0, 0.0),
        )
        .unwrap();
        assert_eq!(pts[1], Point3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn mismatched_lengths_fail() {
        let path = RoutePath::new(vec![0.0; 3], vec![0.0; 3], vec![0.0; 2]);
        let err = transform_path(&path, WorldScale::identity(), DomainSize::new(1.0, 1.0))
            .unwrap_err();
        assert_eq!(err, RouteError::LengthMismatch { x: 3, y: 3, z: 2 });
    }

    #[test]
    fn empty_path_fails() {
        let err = transform_path(
            &RoutePath::default(),
            WorldScale::identity(),
            DomainSize::new(1.0, 1.0),
        )
        .unwrap_err();
        assert_eq!(err, RouteError::EmptyPath);
    }
}
