/// An article on the blog pages. Like products, posts are reference data
/// shipped with the app, so they are never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogPost {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: String,
    pub image: String,
}
