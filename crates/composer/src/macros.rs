/// Implements [`Projection`](crate::projection::Projection) for a type.
///
/// ```ignore
/// projection! {
///     CommentView {
///         Id,
///         Body,
///         AuthorName => "[UserAccount:Id:AuthorId].DisplayName",
///     }
/// }
/// ```
#[macro_export]
macro_rules! projection {
    (@path) => {
        None
    };
    (@path $path:literal) => {
        Some($path)
    };
    ($ty:ident { $($field:ident $(=> $path:literal)?),* $(,)? }) => {
        impl $crate::projection::Projection for $ty {
            fn shape() -> &'static $crate::projection::ProjectionShape {
                static SHAPE: $crate::projection::ProjectionShape =
                    $crate::projection::ProjectionShape {
                        name: stringify!($ty),
                        fields: &[$(
                            $crate::projection::ProjectionField {
                                name: stringify!($field),
                                join_path: $crate::projection!(@path $($path)?),
                            }
                        ),*],
                    };
                &SHAPE
            }
        }
    };
}
