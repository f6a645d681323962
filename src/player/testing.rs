// SPDX-License-Identifier: MPL-2.0
//! Test doubles for the player seams.
//!
//! Both doubles share their recorded state through `Rc<RefCell<_>>` so a
//! test keeps a handle after moving the double into the player.

use crate::media::{MediaElement, MediaEvent, MediaHost, MediaSource, ObjectUrl, UploadedFile};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct HostLog {
    pub created: Vec<ObjectUrl>,
    pub revoked: Vec<ObjectUrl>,
    live: HashMap<ObjectUrl, PathBuf>,
}

impl HostLog {
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}

/// Media host that records every allocation and release.
#[derive(Debug, Default)]
pub struct RecordingHost {
    log: Rc<RefCell<HostLog>>,
}

impl RecordingHost {
    pub fn log(&self) -> Rc<RefCell<HostLog>> {
        Rc::clone(&self.log)
    }
}

impl MediaHost for RecordingHost {
    fn create_object_url(&mut self, file: &UploadedFile) -> ObjectUrl {
        let mut log = self.log.borrow_mut();
        let url = ObjectUrl::new(format!("blob:test/{}", log.created.len() + 1));
        log.created.push(url.clone());
        log.live.insert(url.clone(), file.path.clone());
        url
    }

    fn revoke_object_url(&mut self, url: &ObjectUrl) {
        let mut log = self.log.borrow_mut();
        log.live.remove(url);
        log.revoked.push(url.clone());
    }

    fn resolve(&self, url: &str) -> Option<PathBuf> {
        self.log.borrow().live.get(&ObjectUrl::new(url)).cloned()
    }
}

#[derive(Debug)]
pub struct FakeMediaState {
    pub paused: bool,
    pub current_time: f64,
    /// Duration reported once a source is loaded.
    pub source_duration: f64,
    pub duration: f64,
    pub volume: f32,
    pub muted: bool,
    pub loads: Vec<Option<MediaSource>>,
    pub play_calls: usize,
    pub pause_calls: usize,
    pub events: Vec<MediaEvent>,
}

impl Default for FakeMediaState {
    fn default() -> Self {
        Self {
            paused: true,
            current_time: 0.0,
            source_duration: 120.0,
            duration: f64::NAN,
            volume: 1.0,
            muted: false,
            loads: Vec::new(),
            play_calls: 0,
            pause_calls: 0,
            events: Vec::new(),
        }
    }
}

/// Media element that applies commands instantly and queues the matching
/// events, like a media element with an already buffered source.
#[derive(Debug, Default)]
pub struct FakeMedia {
    state: Rc<RefCell<FakeMediaState>>,
}

impl FakeMedia {
    pub fn state(&self) -> Rc<RefCell<FakeMediaState>> {
        Rc::clone(&self.state)
    }
}

impl MediaElement for FakeMedia {
    fn play(&mut self) {
        let mut state = self.state.borrow_mut();
        state.play_calls += 1;
        if state.paused {
            state.paused = false;
            state.events.push(MediaEvent::Play);
        }
    }

    fn pause(&mut self) {
        let mut state = self.state.borrow_mut();
        state.pause_calls += 1;
        if !state.paused {
            state.paused = true;
            state.events.push(MediaEvent::Pause);
        }
    }

    fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        let mut state = self.state.borrow_mut();
        state.current_time = secs;
        state.events.push(MediaEvent::TimeUpdate(secs));
    }

    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }

    fn volume(&self) -> f32 {
        self.state.borrow().volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.state.borrow_mut().volume = volume;
    }

    fn muted(&self) -> bool {
        self.state.borrow().muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }

    fn load(&mut self, source: Option<&MediaSource>) {
        let mut state = self.state.borrow_mut();
        if !state.paused {
            state.paused = true;
            state.events.push(MediaEvent::Pause);
        }
        state.current_time = 0.0;
        state.duration = if source.is_some() {
            state.source_duration
        } else {
            f64::NAN
        };
        state.loads.push(source.cloned());
        let duration = state.duration;
        state.events.push(MediaEvent::DurationChange(duration));
    }

    fn take_events(&mut self) -> Vec<MediaEvent> {
        std::mem::take(&mut self.state.borrow_mut().events)
    }
}
