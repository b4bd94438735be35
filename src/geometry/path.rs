//! Geometry domain: polyline simplification, resampling and filtering.

use bevy::prelude::*;

/// Distance from `point` to the infinite line through `line_start` and `line_end`.
///
/// A vertical (or zero-length) chord is handled by measuring along x only,
/// which is exact for vertical lines and an approximation for coincident
/// endpoints.
pub fn perpendicular_distance(point: Vec2, line_start: Vec2, line_end: Vec2) -> f32 {
    let dx = line_end.x - line_start.x;
    let dy = line_end.y - line_start.y;

    if dx.abs() <= f32::EPSILON {
        return (point.x - line_start.x).abs();
    }

    let slope = dy / dx;
    let intercept = line_start.y - slope * line_start.x;
    (slope * point.x - point.y + intercept).abs() / (slope * slope + 1.0).sqrt()
}

/// Distance from `point` to the closed segment `a..b`.
pub fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let dir = b - a;
    let len_sq = dir.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(dir) / len_sq).clamp(0.0, 1.0);
    point.distance(a + dir * t)
}

/// Ramer-Douglas-Peucker simplification.
///
/// The result is a subsequence of `points` that always keeps the first and
/// last point. Paths of two points or fewer are returned unchanged.
pub fn simplify_path(points: &[Vec2], tolerance: f32) -> Vec<Vec2> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_distance = 0.0_f32;
    let mut split_index = 0;
    for (i, &point) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let distance = perpendicular_distance(point, first, last);
        if distance > max_distance {
            max_distance = distance;
            split_index = i;
        }
    }

    if max_distance > tolerance {
        let mut simplified = simplify_path(&points[..=split_index], tolerance);
        let tail = simplify_path(&points[split_index..], tolerance);
        // The split point ends the head and starts the tail
        simplified.pop();
        simplified.extend(tail);
        simplified
    } else {
        vec![first, last]
    }
}

/// Total arc length of a polyline.
pub fn path_length(path: &[Vec2]) -> f32 {
    path.windows(2).map(|pair| pair[0].distance(pair[1])).sum()
}

/// Resample `path` into exactly `count` points spaced at equal arc length.
///
/// The first output point is always the first input point. If rounding
/// leaves the walk short, the tail is padded with the final input point.
pub fn resample_to_equal_segments(path: &[Vec2], count: usize) -> Vec<Vec2> {
    let Some(&first) = path.first() else {
        return Vec::new();
    };
    if count == 0 {
        return Vec::new();
    }

    let total = path_length(path);
    if count == 1 || total <= f32::EPSILON {
        return vec![first; count];
    }

    let step = total / (count - 1) as f32;
    let mut resampled = Vec::with_capacity(count);
    resampled.push(first);

    let mut target = step;
    let mut walked = 0.0_f32;
    for pair in path.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = a.distance(b);
        if length <= f32::EPSILON {
            continue;
        }

        while resampled.len() < count && target <= walked + length {
            let t = (target - walked) / length;
            resampled.push(a.lerp(b, t));
            target += step;
        }
        walked += length;
    }

    let last = path[path.len() - 1];
    while resampled.len() < count {
        resampled.push(last);
    }
    resampled
}

/// Moving-average low-pass filter over a symmetric window.
///
/// The window is truncated at both ends of the path, so the output has the
/// same length as the input.
pub fn smooth(path: &[Vec2], window_size: usize) -> Vec<Vec2> {
    if window_size <= 1 || path.len() <= 2 {
        return path.to_vec();
    }

    let half = window_size / 2;
    (0..path.len())
        .map(|i| {
            let start = i.saturating_sub(half);
            let end = (i + half).min(path.len() - 1);
            let window = &path[start..=end];
            window.iter().copied().sum::<Vec2>() / window.len() as f32
        })
        .collect()
}

/// Mirror a path across the vertical axis (`x' = -x`).
pub fn mirror_x(path: &[Vec2]) -> Vec<Vec2> {
    path.iter().map(|p| Vec2::new(-p.x, p.y)).collect()
}

/// Axis-aligned bounds of a path, or `None` when it is empty.
pub fn bounding_box(path: &[Vec2]) -> Option<Rect> {
    let first = *path.first()?;
    let (min, max) = path
        .iter()
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
    Some(Rect { min, max })
}
