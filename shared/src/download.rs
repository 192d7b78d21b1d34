//! File naming for saved gallery images.

/// Extension assumed when the asset URL carries none.
const DEFAULT_EXTENSION: &str = "jpg";

/// Name under which an image is saved.
///
/// Uses the last path segment of `image_url` when it looks like a file
/// name, otherwise `<slug of title>-<image id>.jpg`.
pub fn download_file_name(image_url: &str, title: &str, image_id: i64) -> String {
    if let Some(name) = file_segment(image_url) {
        return name;
    }

    let slug = slugify(title);
    if slug.is_empty() {
        format!("wonderful-indonesia-{image_id}.{DEFAULT_EXTENSION}")
    } else {
        format!("{slug}-{image_id}.{DEFAULT_EXTENSION}")
    }
}

fn file_segment(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let path = path.split_once("://").map_or(path, |(_, rest)| {
        rest.split_once('/').map_or("", |(_, p)| p)
    });
    let segment = path.rsplit('/').next().unwrap_or_default();
    let decoded = urlencoding::decode(segment).ok()?.into_owned();

    let (stem, ext) = decoded.rsplit_once('.')?;
    if stem.trim().is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(decoded)
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::download_file_name;

    #[test]
    fn keeps_file_name_from_url() {
        assert_eq!(
            download_file_name("https://cdn.example/uploads/2024/Pura%20Ulun%20Danu.JPG?w=2000", "x", 1),
            "Pura Ulun Danu.JPG"
        );
    }

    #[test]
    fn falls_back_to_title_slug() {
        assert_eq!(
            download_file_name("https://cdn.example/image/8812", "Pantai Kuta, Bali!", 8812),
            "pantai-kuta-bali-8812.jpg"
        );
    }

    #[test]
    fn falls_back_to_generic_name() {
        assert_eq!(download_file_name("https://cdn.example/", "   ", 5), "wonderful-indonesia-5.jpg");
        assert_eq!(download_file_name("", "", 6), "wonderful-indonesia-6.jpg");
    }

    #[test]
    fn host_alone_is_not_a_file_name() {
        assert_eq!(download_file_name("https://cdn.example.com", "Bromo", 2), "bromo-2.jpg");
    }
}
