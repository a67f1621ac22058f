// Static portfolio content: project reels, client brands and creator channels.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
  Reels,
  VideosUi,
  VideosProduct,
  LogoReveal,
}

impl Category {
  pub const ALL: [Category; 4] = [Category::Reels, Category::VideosUi, Category::VideosProduct, Category::LogoReveal];

  pub fn id(&self) -> &'static str {
    match self {
      Category::Reels => "reels",
      Category::VideosUi => "videosUI",
      Category::VideosProduct => "videosProduct",
      Category::LogoReveal => "logoReveal",
    }
  }

  pub fn label_key(&self) -> &'static str {
    match self {
      Category::Reels => "projects.categories.reels",
      Category::VideosUi => "projects.categories.videosUI",
      Category::VideosProduct => "projects.categories.videosProduct",
      Category::LogoReveal => "projects.categories.logoReveal",
    }
  }

  fn id_prefix(&self) -> &'static str {
    match self {
      Category::Reels => "reel",
      Category::VideosUi => "ui",
      Category::VideosProduct => "product",
      Category::LogoReveal => "logo",
    }
  }

  fn title_prefix(&self) -> &'static str {
    match self {
      Category::Reels => "Reel",
      Category::VideosUi => "UI Video",
      Category::VideosProduct => "Product Video",
      Category::LogoReveal => "Logo Reveal",
    }
  }

  fn poster_seed(&self) -> usize {
    match self {
      Category::Reels => 10,
      Category::VideosUi => 20,
      Category::VideosProduct => 30,
      Category::LogoReveal => 40,
    }
  }

  fn video_url(&self) -> &'static str {
    match self {
      Category::Reels => "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4",
      Category::VideosUi => "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4",
      Category::VideosProduct => "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4",
      Category::LogoReveal => "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4",
    }
  }
}

pub const PROJECTS_PER_CATEGORY: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
  pub id: String,
  pub title: String,
  pub poster: String,
  pub video_url: &'static str,
  pub alt: String,
}

pub fn projects(category: Category) -> Vec<Project> {
  (1..=PROJECTS_PER_CATEGORY).map(|i| {
    let title = format!("{} {}", category.title_prefix(), i);
    Project {
      id: format!("{}-{}", category.id_prefix(), i),
      alt: format!("{} project {}", category.title_prefix(), i),
      poster: format!("https://picsum.photos/270/480?random={}", category.poster_seed() + i - 1),
      video_url: category.video_url(),
      title,
    }
  }).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brand {
  pub id: u32,
  pub name: &'static str,
  pub logo_url: &'static str,
}

pub const BRANDS: [Brand; 8] = [
  Brand { id: 1, name: "Google", logo_url: "https://logo.clearbit.com/google.com" },
  Brand { id: 2, name: "Amazon", logo_url: "https://logo.clearbit.com/amazon.com" },
  Brand { id: 3, name: "Apple", logo_url: "https://logo.clearbit.com/apple.com" },
  Brand { id: 4, name: "Netflix", logo_url: "https://logo.clearbit.com/netflix.com" },
  Brand { id: 5, name: "Meta", logo_url: "https://logo.clearbit.com/meta.com" },
  Brand { id: 6, name: "Microsoft", logo_url: "https://logo.clearbit.com/microsoft.com" },
  Brand { id: 7, name: "Adobe", logo_url: "https://logo.clearbit.com/adobe.com" },
  Brand { id: 8, name: "Tesla", logo_url: "https://logo.clearbit.com/tesla.com" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Channel {
  pub id: u32,
  pub name: &'static str,
  pub avatar_url: &'static str,
  pub subscribers: &'static str,
  pub handle: &'static str,
}

pub const CHANNELS: [Channel; 8] = [
  Channel { id: 1, name: "MrBeast", avatar_url: "https://yt3.ggpht.com/ytc/AKedOLSxHONhKnrxh8qRNjUFEBLd8Y7UJEGDZmVZQg=s88-c-k-c0x00ffffff-no-rj", subscribers: "112M", handle: "@MrBeast" },
  Channel { id: 2, name: "PewDiePie", avatar_url: "https://yt3.ggpht.com/5oUY3tashyxfqsjO5SGhjT4dus8FkN9CsAHwXWISFrdPYii1FudD4ICtLfuCw6-THJsJbgoY=s88-c-k-c0x00ffffff-no-rj", subscribers: "111M", handle: "@PewDiePie" },
  Channel { id: 3, name: "Dude Perfect", avatar_url: "https://yt3.ggpht.com/ytc/AKedOLT8kJ3HZJKXSgZy6QHojDHXz1oW0S9bKqY_6w=s88-c-k-c0x00ffffff-no-rj", subscribers: "59.1M", handle: "@DudePerfect" },
  Channel { id: 4, name: "Markiplier", avatar_url: "https://yt3.ggpht.com/ytc/AKedOLTDmbRCsXYxKWLKfmBpQw0JBnDLKJQKjGkPOg=s88-c-k-c0x00ffffff-no-rj", subscribers: "35.8M", handle: "@Markiplier" },
  Channel { id: 5, name: "Casey Neistat", avatar_url: "https://yt3.ggpht.com/ytc/AKedOLSsBVxCiexv-CXNfBJ5N8TkiSTwbKZnG2CUhQ=s88-c-k-c0x00ffffff-no-rj", subscribers: "12.4M", handle: "@CaseyNeistat" },
  Channel { id: 6, name: "Peter McKinnon", avatar_url: "https://yt3.ggpht.com/ytc/AKedOLTRCfqbW6x9YKvkfzKQSDkBuHGtKRX5FkVBCw=s88-c-k-c0x00ffffff-no-rj", subscribers: "5.12M", handle: "@PeterMcKinnon" },
  Channel { id: 7, name: "MKBHD", avatar_url: "https://yt3.ggpht.com/lkH37D3Oq90ZqbR5KhYGp6h2y0YZl7skmG2oLm8OgKQYGpwGM-zVZ1L5i7TuZBNzB8NJOA=s88-c-k-c0x00ffffff-no-rj", subscribers: "18.3M", handle: "@MKBHD" },
  Channel { id: 8, name: "Emma Chamberlain", avatar_url: "https://yt3.ggpht.com/ytc/AKedOLQhL3cTOCWXq6GySszXNKKGUKqR5T2T8UrZAw=s88-c-k-c0x00ffffff-no-rj", subscribers: "11.9M", handle: "@EmmaChamberlain" },
];

/// Repeat a strip of items so a CSS marquee can loop without a visible seam.
pub fn looped<T: Clone>(items: &[T], times: usize) -> Vec<T> {
  items.iter().cloned().cycle().take(items.len() * times).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn six_projects_per_category_with_unique_ids() {
    let mut ids = Vec::new();
    for cat in Category::ALL {
      let list = projects(cat);
      assert_eq!(list.len(), PROJECTS_PER_CATEGORY);
      ids.extend(list.into_iter().map(|p| p.id));
    }
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
  }

  #[test]
  fn project_fields_follow_category() {
    let reels = projects(Category::Reels);
    assert_eq!(reels[0].id, "reel-1");
    assert_eq!(reels[0].title, "Reel 1");
    assert_eq!(reels[0].poster, "https://picsum.photos/270/480?random=10");
    let logos = projects(Category::LogoReveal);
    assert_eq!(logos[5].id, "logo-6");
    assert_eq!(logos[5].poster, "https://picsum.photos/270/480?random=45");
  }

  #[test]
  fn looped_strip_triples_items() {
    let strip = looped(&BRANDS, 3);
    assert_eq!(strip.len(), 24);
    assert_eq!(strip[8], BRANDS[0]);
    assert_eq!(strip[23], BRANDS[7]);
  }
}
