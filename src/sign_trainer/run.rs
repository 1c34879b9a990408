use crate::sign_trainer::core::{init, transition, Effect, RunState};
use crate::sign_trainer::main::SignTrainer;

impl SignTrainer {
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (mut current_model, effects) = init();
        *self.model.lock().unwrap() = current_model.clone();

        self.spawn_effects(effects);

        loop {
            let event = match self.event_receiver.lock().unwrap().recv() {
                Ok(event) => event,
                Err(error) => return Err(Box::new(error)),
            };

            let _ = self
                .logger
                .info(&format!("Processing event: {}", event.to_display_string()));

            let (new_model, new_effects) = transition(current_model, event);
            current_model = new_model.clone();
            *self.model.lock().unwrap() = new_model;

            if let Err(error) = self.render(&current_model) {
                let _ = self.logger.error(&format!("Render failed: {}", error));
            }

            if current_model.run == RunState::Stopped {
                let _ = self.logger.info("Capture loop stopped");
                return Ok(());
            }

            self.spawn_effects(new_effects);
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let effect_sender = self.event_sender.clone();
            let effect_clone = effect.clone();
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect_clone, effect_sender));
        }
    }
}
