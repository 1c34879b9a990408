#[cfg(test)]
mod trainer_test {

    use crate::classifier::{self, Prediction};
    use crate::dataset_codec::CodecError;
    use crate::example_store::StoreError;
    use crate::sign_trainer::core::RunState;
    use crate::sign_trainer::ops::TrainerError;
    use crate::sign_trainer::tests::fixture::Fixture;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn prediction(label: u32) -> Prediction {
        Prediction {
            label,
            confidences: BTreeMap::from([(label, 1.0)]),
        }
    }

    #[test]
    fn test_add_class_assigns_ids_and_rejects_duplicates() {
        let fixture = Fixture::new();

        let ah = fixture.sign_trainer.add_class("ah").unwrap();
        let ee = fixture.sign_trainer.add_class("ee").unwrap();
        assert_eq!(ah.id, 1);
        assert_eq!(ee.id, 2);

        let result = fixture.sign_trainer.add_class("ah");
        assert!(matches!(
            result,
            Err(TrainerError::Store(StoreError::DuplicateClassName(_)))
        ));
        assert_eq!(fixture.sign_trainer.classes().len(), 2);
    }

    #[test]
    fn test_request_training_capture_requires_known_class() {
        let fixture = Fixture::new();

        let result = fixture.sign_trainer.request_training_capture(7);

        assert!(matches!(
            result,
            Err(TrainerError::Store(StoreError::UnknownClass(7)))
        ));
    }

    #[test]
    fn test_snapshot_round_trip_between_sessions() {
        let fixture = Fixture::with_width(4);
        let trainer = &fixture.sign_trainer;
        let ah = trainer.add_class("ah").unwrap();
        let ee = trainer.add_class("ee").unwrap();
        {
            let mut store = trainer.store.lock().unwrap();
            store.add_example(ah.id, vec![1.0, 0.0, 0.0, 0.0]).unwrap();
            store.add_example(ee.id, vec![0.0, 1.0, 0.0, 0.0]).unwrap();
        }

        let snapshot = trainer.save_dataset().unwrap();

        let restored = Fixture::with_width(4);
        restored.sign_trainer.load_dataset(&snapshot).unwrap();

        assert_eq!(restored.sign_trainer.classes(), trainer.classes());

        // The restored session classifies a known pose the same way.
        let store = restored.sign_trainer.store.lock().unwrap();
        let result = classifier::predict(&store, &[1.0, 0.0, 0.0, 0.0])
            .unwrap()
            .unwrap();
        assert_eq!(result.label, 1);
        assert!(result.confidences[&1] > result.confidences[&2]);
    }

    #[test]
    fn test_failed_load_keeps_existing_store() {
        let fixture = Fixture::with_width(4);
        let trainer = &fixture.sign_trainer;
        let ah = trainer.add_class("ah").unwrap();
        trainer
            .store
            .lock()
            .unwrap()
            .add_example(ah.id, vec![1.0, 0.0, 0.0, 0.0])
            .unwrap();

        let parse = trainer.load_dataset("{not json");
        assert!(matches!(
            parse,
            Err(TrainerError::Codec(CodecError::Parse(_)))
        ));

        let misshapen = trainer.load_dataset(r#"{"x": [1.0, 2.0, 3.0]}"#);
        assert!(matches!(
            misshapen,
            Err(TrainerError::Store(StoreError::MalformedDataset(_)))
        ));

        let classes = trainer.classes();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "ah");
        assert_eq!(classes[0].example_count, 1);
    }

    #[test]
    fn test_confirmed_predictions_accumulate_text() {
        let fixture = Fixture::new();
        let trainer = &fixture.sign_trainer;
        trainer.add_class("ah").unwrap();
        trainer.model.lock().unwrap().last_prediction = Some(prediction(1));

        assert_eq!(trainer.predicted_symbol(), Some("අ".to_string()));

        trainer.confirm_prediction();
        trainer.confirm_prediction();
        assert_eq!(trainer.text(), "අඅ");

        trainer.append_space();
        assert_eq!(trainer.text(), "අඅ ");

        trainer.delete_last();
        assert_eq!(trainer.text(), "අඅ");

        trainer.clear_text();
        assert_eq!(trainer.text(), "");
    }

    #[test]
    fn test_confirm_without_prediction_is_noop() {
        let fixture = Fixture::new();

        fixture.sign_trainer.confirm_prediction();

        assert_eq!(fixture.sign_trainer.text(), "");
    }

    #[test]
    fn test_run_stops_on_request() {
        let fixture = Fixture::new();
        let trainer = fixture.sign_trainer.clone();

        let handle = std::thread::spawn(move || trainer.run());

        std::thread::sleep(Duration::from_millis(150));
        fixture.sign_trainer.stop();

        handle.join().unwrap().unwrap();
        assert_eq!(
            fixture.sign_trainer.model.lock().unwrap().run,
            RunState::Stopped
        );
        assert!(!fixture.display_lines.lock().unwrap().is_empty());
    }
}
