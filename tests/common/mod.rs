//! Shared fakes for integration tests.

#![allow(dead_code)]

use menu_mode::widgets::{
    ActivationMode, InputFrame, Location, MenuWindows, StaticGameData, SubWindow,
};
use menu_mode::{MenuController, WindowId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct Spy {
    pub active: bool,
    pub mode: Option<ActivationMode>,
    pub activations: usize,
    pub updates: usize,
    pub location: Option<Location>,
}

/// Window that closes itself on cancel and reports through a shared spy.
pub struct ScriptedWindow {
    spy: Rc<RefCell<Spy>>,
}

impl SubWindow for ScriptedWindow {
    fn is_active(&self) -> bool {
        self.spy.borrow().active
    }

    fn update(&mut self, input: &InputFrame) {
        let mut spy = self.spy.borrow_mut();
        spy.updates += 1;
        if input.cancel {
            spy.active = false;
        }
    }

    fn activate(&mut self, enable: bool, mode: ActivationMode) {
        let mut spy = self.spy.borrow_mut();
        spy.active = enable;
        if enable {
            spy.activations += 1;
            spy.mode = Some(mode);
        }
    }

    fn viewing_location(&self) -> Option<Location> {
        self.spy.borrow().location.clone()
    }
}

pub struct Spies {
    spies: Vec<(WindowId, Rc<RefCell<Spy>>)>,
}

impl Spies {
    pub fn get(&self, id: WindowId) -> Rc<RefCell<Spy>> {
        self.spies
            .iter()
            .find(|(window, _)| *window == id)
            .map(|(_, spy)| Rc::clone(spy))
            .expect("every window has a spy")
    }

    pub fn is_active(&self, id: WindowId) -> bool {
        self.get(id).borrow().active
    }
}

pub fn scripted_windows() -> (MenuWindows, Spies) {
    let mut spies = Vec::new();
    let mut make = |id: WindowId| -> Box<dyn SubWindow> {
        let spy = Rc::new(RefCell::new(Spy::default()));
        spies.push((id, Rc::clone(&spy)));
        Box::new(ScriptedWindow { spy })
    };
    let windows = MenuWindows {
        inventory: make(WindowId::Inventory),
        party: make(WindowId::Party),
        skills: make(WindowId::Skills),
        equip: make(WindowId::Equip),
        quest: make(WindowId::Quest),
        quest_list: make(WindowId::QuestList),
        world_map: make(WindowId::WorldMap),
    };
    (windows, Spies { spies })
}

pub fn party_of(size: usize) -> StaticGameData {
    StaticGameData {
        play_time: Duration::from_secs(3723),
        currency: 250,
        party_size: size,
        location_name: "Harrvah".to_string(),
        location_graphic: Some("img/locations/harrvah.png".to_string()),
    }
}

pub fn everything_exists(_: &str) -> bool {
    true
}

/// Route the crate's logs to the test harness; `RUST_LOG` picks the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A fresh menu over scripted windows with a party of three.
pub fn open_menu() -> (MenuController, Spies, StaticGameData) {
    init_tracing();
    let (windows, spies) = scripted_windows();
    let data = party_of(3);
    let menu = MenuController::new(windows, &data, &everything_exists)
        .expect("menu should open with a valid party");
    (menu, spies, data)
}
