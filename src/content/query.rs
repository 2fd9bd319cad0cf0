/// GROQ queries sent to the content store's query API.
///
/// Values are always passed as `$`-parameters rather than interpolated, so
/// slugs never need escaping into the query text.

/// Fetch one post by its slug, with the fields the renderer needs
pub const POST_BY_SLUG: &str = r#"*[_type == "post" && slug.current == $slug][0]{
  _id,
  title,
  slug,
  publishedAt,
  image,
  body
}"#;

/// Fetch one post by its slug, drafts included (preview perspective)
pub const POST_BY_SLUG_WITH_DRAFTS: &str = r#"*[(_type == "post" && slug.current == $slug)] | order(_updatedAt desc)[0]{
  _id,
  title,
  slug,
  publishedAt,
  image,
  body
}"#;

/// All published posts with a usable slug, newest first
pub const ALL_POST_SUMMARIES: &str = r#"*[
  _type == "post"
  && defined(slug.current)
] | order(publishedAt desc){ title, slug, publishedAt }"#;
