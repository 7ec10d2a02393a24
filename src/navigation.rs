use crate::post::Post;

/// Neighbors of a post in the newest-first sequence. `previous` is the newer
/// post, `next` the older one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationLink<'a> {
    pub previous: Option<&'a Post>,
    pub next: Option<&'a Post>,
}

/// Neighbors of `posts[index]`. An index out of range has none.
pub fn resolve(posts: &[Post], index: usize) -> NavigationLink<'_> {
    if index >= posts.len() {
        return NavigationLink::default();
    }

    NavigationLink {
        previous: index.checked_sub(1).map(|i| &posts[i]),
        next: posts.get(index + 1),
    }
}

#[cfg(test)]
mod tests {
    use crate::text_utils::PostDate;

    use super::*;

    fn post(slug: &str, date: &str) -> Post {
        Post {
            slug: slug.to_string(),
            title: slug.to_uppercase(),
            date: PostDate::parse(date),
            display_date: date.to_string(),
            content: String::new(),
        }
    }

    fn slugs(link: NavigationLink) -> (Option<&str>, Option<&str>) {
        (link.previous.map(|p| p.slug.as_str()), link.next.map(|p| p.slug.as_str()))
    }

    #[test]
    fn test_three_posts() {
        // already sorted newest first
        let posts = vec![post("b", "2024-03-01"), post("c", "2024-02-01"), post("a", "2024-01-01")];

        assert_eq!(slugs(resolve(&posts, 0)), (None, Some("c")));
        assert_eq!(slugs(resolve(&posts, 1)), (Some("b"), Some("a")));
        assert_eq!(slugs(resolve(&posts, 2)), (Some("c"), None));
        assert_eq!(slugs(resolve(&posts, 3)), (None, None));
    }

    #[test]
    fn test_single_post() {
        let posts = vec![post("only", "2024-03-01")];
        assert_eq!(slugs(resolve(&posts, 0)), (None, None));
        assert_eq!(slugs(resolve(&[], 0)), (None, None));
    }

    #[test]
    fn test_symmetry() {
        let posts: Vec<Post> = (0..6).map(|i| post(&format!("p{}", i), "2024-01-01")).collect();
        for i in 0..posts.len() {
            let link = resolve(&posts, i);
            if let Some(prev) = link.previous {
                let j = posts.iter().position(|p| p.slug == prev.slug).unwrap();
                assert_eq!(resolve(&posts, j).next.map(|p| p.slug.as_str()), Some(posts[i].slug.as_str()));
            }
            if let Some(next) = link.next {
                let j = posts.iter().position(|p| p.slug == next.slug).unwrap();
                assert_eq!(resolve(&posts, j).previous.map(|p| p.slug.as_str()), Some(posts[i].slug.as_str()));
            }
        }
        assert!(resolve(&posts, 0).previous.is_none());
        assert!(resolve(&posts, posts.len() - 1).next.is_none());
    }
}
