#[cfg(test)]
mod core_test {

    use crate::classifier::Prediction;
    use crate::device_camera::interface::DeviceCameraEvent;
    use crate::feature_extractor::interface::FeatureExtractorEvent;
    use crate::sign_trainer::core::{
        init, transition, CameraState, DeviceStates, Effect, Event, ExtractorState, Model,
        RunState,
    };
    use image::DynamicImage;
    use std::collections::BTreeMap;

    fn frame() -> DynamicImage {
        DynamicImage::new_rgb8(2, 2)
    }

    fn capturing_model() -> Model {
        Model {
            devices: DeviceStates {
                camera: CameraState::Started,
                extractor: ExtractorState::Loaded,
            },
            run: RunState::Capturing,
            ..Model::default()
        }
    }

    fn prediction(label: u32) -> Prediction {
        Prediction {
            label,
            confidences: BTreeMap::from([(label, 1.0)]),
        }
    }

    #[test]
    fn test_init() {
        let (model, effects) = init();

        assert_eq!(model.run, RunState::Initializing);
        assert!(matches!(model.devices.camera, CameraState::Disconnected));
        assert!(matches!(
            model.devices.extractor,
            ExtractorState::Disconnected
        ));
        assert!(matches!(
            effects.as_slice(),
            [
                Effect::SubscribeToCameraEvents,
                Effect::SubscribeToExtractorEvents
            ]
        ));
    }

    #[test]
    fn test_capture_waits_for_both_devices() {
        let (model, _) = init();

        // Camera comes up first
        let (model, effects) = transition(model, Event::CameraEvent(DeviceCameraEvent::Connected));
        assert!(matches!(effects.as_slice(), [Effect::StartCamera]));

        let (model, effects) = transition(model, Event::CameraStartDone(Ok(())));
        assert_eq!(model.run, RunState::Initializing);
        assert!(effects.is_empty());

        // Extractor follows; capture starts only once it is loaded
        let (model, effects) = transition(
            model,
            Event::ExtractorEvent(FeatureExtractorEvent::Connected),
        );
        assert!(matches!(effects.as_slice(), [Effect::LoadExtractor]));

        let (model, effects) = transition(model, Event::ExtractorLoadDone(Ok(())));
        assert_eq!(model.run, RunState::Capturing);
        assert!(matches!(effects.as_slice(), [Effect::CaptureFrame]));
    }

    #[test]
    fn test_extractor_first_then_camera() {
        let (model, _) = init();

        let (model, _) = transition(
            model,
            Event::ExtractorEvent(FeatureExtractorEvent::Connected),
        );
        let (model, effects) = transition(model, Event::ExtractorLoadDone(Ok(())));
        assert_eq!(model.run, RunState::Initializing);
        assert!(effects.is_empty());

        let (model, _) = transition(model, Event::CameraEvent(DeviceCameraEvent::Connected));
        let (model, effects) = transition(model, Event::CameraStartDone(Ok(())));
        assert_eq!(model.run, RunState::Capturing);
        assert!(matches!(effects.as_slice(), [Effect::CaptureFrame]));
    }

    #[test]
    fn test_inference_iteration_flow() {
        let model = capturing_model();

        let (model, effects) = transition(model, Event::FrameCaptureDone(Ok(frame())));
        assert_eq!(model.run, RunState::Embedding);
        assert!(matches!(effects.as_slice(), [Effect::EmbedFrame { .. }]));

        let (model, effects) = transition(model, Event::FrameEmbedDone(Ok(vec![1.0, 0.0])));
        assert_eq!(model.run, RunState::Classifying);
        assert!(matches!(
            effects.as_slice(),
            [Effect::ClassifyEmbedding { .. }]
        ));

        let (model, effects) = transition(model, Event::ClassifyDone(Ok(Some(prediction(1)))));
        assert_eq!(model.run, RunState::Idle);
        assert!(matches!(effects.as_slice(), [Effect::Delay]));
        assert_eq!(model.last_prediction.unwrap().label, 1);
    }

    #[test]
    fn test_training_request_routes_next_embedding() {
        let model = capturing_model();

        let (model, _) = transition(model, Event::TrainExampleRequested(2));
        assert_eq!(model.pending_capture, Some(2));

        let (model, _) = transition(model, Event::FrameCaptureDone(Ok(frame())));
        let (model, effects) = transition(model, Event::FrameEmbedDone(Ok(vec![1.0, 0.0])));

        assert_eq!(model.run, RunState::Recording { class_id: 2 });
        assert!(matches!(
            effects.as_slice(),
            [Effect::RecordExample { class_id: 2, .. }]
        ));
        assert_eq!(model.pending_capture, None);

        let (model, effects) = transition(model, Event::ExampleRecordDone(Ok(1)));
        assert_eq!(model.run, RunState::Idle);
        assert!(matches!(effects.as_slice(), [Effect::Delay]));
    }

    #[test]
    fn test_classify_none_keeps_previous_prediction() {
        let mut model = capturing_model();
        model.run = RunState::Classifying;
        model.last_prediction = Some(prediction(3));

        let (model, _) = transition(model, Event::ClassifyDone(Ok(None)));

        assert_eq!(model.last_prediction.unwrap().label, 3);
    }

    #[test]
    fn test_capture_error_skips_iteration() {
        let model = capturing_model();

        let (model, effects) =
            transition(model, Event::FrameCaptureDone(Err("camera busy".into())));

        assert_eq!(model.run, RunState::Idle);
        assert!(matches!(effects.as_slice(), [Effect::Delay]));
    }

    #[test]
    fn test_embed_error_skips_iteration() {
        let mut model = capturing_model();
        model.run = RunState::Embedding;

        let (model, effects) = transition(model, Event::FrameEmbedDone(Err("oom".into())));

        assert_eq!(model.run, RunState::Idle);
        assert!(matches!(effects.as_slice(), [Effect::Delay]));
    }

    #[test]
    fn test_delay_done_starts_next_capture() {
        let mut model = capturing_model();
        model.run = RunState::Idle;

        let (model, effects) = transition(model, Event::DelayDone);

        assert_eq!(model.run, RunState::Capturing);
        assert!(matches!(effects.as_slice(), [Effect::CaptureFrame]));
    }

    #[test]
    fn test_stop_discards_pending_capture() {
        let mut model = capturing_model();
        model.run = RunState::Embedding;
        model.pending_capture = Some(1);

        let (model, effects) = transition(model, Event::StopRequested);

        assert_eq!(model.run, RunState::Stopped);
        assert_eq!(model.pending_capture, None);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_stopped_ignores_in_flight_results() {
        let mut model = capturing_model();
        model.run = RunState::Stopped;

        let (model, effects) = transition(model, Event::FrameEmbedDone(Ok(vec![1.0])));

        assert_eq!(model.run, RunState::Stopped);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_camera_disconnect_reenters_ready_gate() {
        let model = capturing_model();

        let (model, effects) =
            transition(model, Event::CameraEvent(DeviceCameraEvent::Disconnected));

        assert_eq!(model.run, RunState::Initializing);
        assert!(matches!(model.devices.camera, CameraState::Disconnected));
        assert!(matches!(model.devices.extractor, ExtractorState::Loaded));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_extractor_disconnect_reenters_ready_gate() {
        let model = capturing_model();

        let (model, effects) = transition(
            model,
            Event::ExtractorEvent(FeatureExtractorEvent::Disconnected),
        );

        assert_eq!(model.run, RunState::Initializing);
        assert!(matches!(
            model.devices.extractor,
            ExtractorState::Disconnected
        ));
        assert!(effects.is_empty());
    }
}
