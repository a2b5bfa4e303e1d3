// src/processing/kernel.rs
use anyhow::{ensure, Result};
use ndarray::{Array, ArrayView, Dimension, Zip};

/// Element count above which the kernels fan out over the rayon pool.
/// Smaller rasters (test images, single tiles) are zipped sequentially.
pub const PARALLEL_THRESHOLD: usize = 512 * 512;

/// A band view tagged with the name reported in shape errors.
pub type Named<'a, D> = (&'static str, ArrayView<'a, f32, D>);

/// Return true when an array of `len` elements takes the parallel path
pub fn is_parallel(len: usize) -> bool {
    len > PARALLEL_THRESHOLD
}

/// Fail unless every `(name, shape)` pair shares the shape of `first`.
pub fn check_shapes(first: (&str, &[usize]), rest: &[(&str, &[usize])]) -> Result<()> {
    let (first_name, first_shape) = first;
    for &(name, shape) in rest {
        ensure!(
            shape == first_shape,
            "Band shape mismatch: {} {:?} vs {} {:?}",
            first_name,
            first_shape,
            name,
            shape
        );
    }
    Ok(())
}

pub fn map2<D, F>(a: Named<'_, D>, b: Named<'_, D>, f: F) -> Result<Array<f32, D>>
where
    D: Dimension,
    F: Fn(f32, f32) -> f32 + Sync + Send,
{
    check_shapes((a.0, a.1.shape()), &[(b.0, b.1.shape())])?;
    let parallel = is_parallel(a.1.len());
    let zip = Zip::from(a.1).and(b.1);

    Ok(if parallel {
        zip.par_map_collect(|&a, &b| f(a, b))
    } else {
        zip.map_collect(|&a, &b| f(a, b))
    })
}

pub fn map3<D, F>(a: Named<'_, D>, b: Named<'_, D>, c: Named<'_, D>, f: F) -> Result<Array<f32, D>>
where
    D: Dimension,
    F: Fn(f32, f32, f32) -> f32 + Sync + Send,
{
    check_shapes(
        (a.0, a.1.shape()),
        &[(b.0, b.1.shape()), (c.0, c.1.shape())],
    )?;
    let parallel = is_parallel(a.1.len());
    let zip = Zip::from(a.1).and(b.1).and(c.1);

    Ok(if parallel {
        zip.par_map_collect(|&a, &b, &c| f(a, b, c))
    } else {
        zip.map_collect(|&a, &b, &c| f(a, b, c))
    })
}

pub fn map4<D, F>(
    a: Named<'_, D>,
    b: Named<'_, D>,
    c: Named<'_, D>,
    d: Named<'_, D>,
    f: F,
) -> Result<Array<f32, D>>
where
    D: Dimension,
    F: Fn(f32, f32, f32, f32) -> f32 + Sync + Send,
{
    check_shapes(
        (a.0, a.1.shape()),
        &[(b.0, b.1.shape()), (c.0, c.1.shape()), (d.0, d.1.shape())],
    )?;
    let parallel = is_parallel(a.1.len());
    let zip = Zip::from(a.1).and(b.1).and(c.1).and(d.1);

    Ok(if parallel {
        zip.par_map_collect(|&a, &b, &c, &d| f(a, b, c, d))
    } else {
        zip.map_collect(|&a, &b, &c, &d| f(a, b, c, d))
    })
}
