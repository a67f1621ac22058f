/// What the page should do to its `<video>` elements after a play request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackChange {
  /// Pause and rewind this one, it was playing before.
  pub stop: Option<String>,
  pub pause: Option<String>,
  pub play: Option<String>,
}

/// Tracks the single project video allowed to play at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Playback {
  playing: Option<String>,
}

impl Playback {
  #[cfg(test)]
  fn playing(&self) -> Option<&str> {
    self.playing.as_deref()
  }

  pub fn is_playing(&self, id: &str) -> bool {
    self.playing.as_deref() == Some(id)
  }

  /// Toggle `id`; `paused` is the element's own paused flag.
  pub fn toggle(&mut self, id: &str, paused: bool) -> PlaybackChange {
    let mut change = PlaybackChange::default();
    if let Some(current) = self.playing.as_deref() {
      if current != id {
        change.stop = Some(current.to_string());
      }
    }
    if paused {
      self.playing = Some(id.to_string());
      change.play = Some(id.to_string());
    } else {
      self.playing = None;
      change.pause = Some(id.to_string());
    }
    change
  }

  /// Switching tabs stops whatever is playing.
  pub fn stop_all(&mut self) -> Option<String> {
    self.playing.take()
  }

  pub fn ended(&mut self, id: &str) {
    if self.is_playing(id) {
      self.playing = None;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn playing_another_video_stops_the_first() {
    let mut pb = Playback::default();
    assert_eq!(pb.toggle("reel-1", true).play.as_deref(), Some("reel-1"));
    let change = pb.toggle("reel-2", true);
    assert_eq!(change.stop.as_deref(), Some("reel-1"));
    assert_eq!(change.play.as_deref(), Some("reel-2"));
    assert!(pb.is_playing("reel-2"));
  }

  #[test]
  fn toggling_a_playing_video_pauses_it() {
    let mut pb = Playback::default();
    pb.toggle("reel-1", true);
    let change = pb.toggle("reel-1", false);
    assert_eq!(change, PlaybackChange { stop: None, pause: Some("reel-1".into()), play: None });
    assert_eq!(pb.playing(), None);
  }

  #[test]
  fn end_and_tab_switch_clear_state() {
    let mut pb = Playback::default();
    pb.toggle("ui-1", true);
    pb.ended("ui-2");
    assert!(pb.is_playing("ui-1"));
    pb.ended("ui-1");
    assert_eq!(pb.playing(), None);

    pb.toggle("ui-3", true);
    assert_eq!(pb.stop_all().as_deref(), Some("ui-3"));
    assert_eq!(pb.stop_all(), None);
  }
}
