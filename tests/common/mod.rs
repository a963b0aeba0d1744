#![allow(dead_code)]

use adgenius::{Audience, Content, ContentService, Error, Goal, Result, SocialPost, Strategy, VisualStyle};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub enum Background {
    Image(String),
    Empty,
    Fail,
}

/// Content service that replays queued outcomes and counts calls.
#[derive(Default)]
pub struct ScriptedService {
    copy: Mutex<VecDeque<Result<Content>>>,
    backgrounds: Mutex<VecDeque<Background>>,
    pub copy_calls: AtomicUsize,
    pub background_calls: AtomicUsize,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copy(self, content: Content) -> Self {
        self.copy.lock().unwrap().push_back(Ok(content));
        self
    }

    pub fn with_copy_error(self, msg: &str) -> Self {
        self.copy.lock().unwrap().push_back(Err(Error::Generation(msg.to_string())));
        self
    }

    pub fn with_background(self, bg: Background) -> Self {
        self.backgrounds.lock().unwrap().push_back(bg);
        self
    }

    pub fn push_background(&self, bg: Background) {
        self.backgrounds.lock().unwrap().push_back(bg);
    }

    pub fn push_copy(&self, content: Content) {
        self.copy.lock().unwrap().push_back(Ok(content));
    }
}

impl ContentService for ScriptedService {
    fn generate_copy(&self, _strategy: &Strategy) -> Result<Content> {
        self.copy_calls.fetch_add(1, Ordering::SeqCst);
        self.copy
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Generation("no scripted copy".into())))
    }

    fn generate_background(&self, _strategy: &Strategy) -> Result<Option<String>> {
        self.background_calls.fetch_add(1, Ordering::SeqCst);
        match self.backgrounds.lock().unwrap().pop_front() {
            Some(Background::Image(url)) => Ok(Some(url)),
            Some(Background::Empty) => Ok(None),
            Some(Background::Fail) | None => Err(Error::Network("backend unavailable".into())),
        }
    }
}

pub fn image(tag: &str) -> String {
    format!("data:image/png;base64,{}", tag)
}

pub fn strategy() -> Strategy {
    Strategy {
        goal: Goal::NewProductLaunch,
        audience: Audience::Student,
        keywords: vec!["eco bottle".into()],
        promo_mechanism: "buy one get one".into(),
        style: VisualStyle::Vibrant,
        product_image: None,
        scene_preference: None,
    }
}

pub fn content(slogan: &str) -> Content {
    Content {
        social_post: SocialPost {
            title: "Stay hydrated, stay green".into(),
            description: "Single-use bottles pile up every week.".into(),
            solution: "One eco bottle replaces hundreds.".into(),
            cta: "Grab yours today".into(),
            hashtags: vec!["eco".into(), "bottle".into()],
        },
        slogan: slogan.into(),
        promo_tagline: "Buy one, get one free".into(),
        data_viz_value: Some("2x".into()),
    }
}
