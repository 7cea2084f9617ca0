//! Field tables of the remote event catalog, one module per category.

use crate::{catalog::Category, field_category};

field_category! {
    /// Active regions.
    ar => "AR", event = "ar" {
        COMPACTNESS_CLS = "AR_CompactnessCls",
        INTENS_KURT = "AR_IntensKurt",
        INTENS_MAX = "AR_IntensMax",
        INTENS_MEAN = "AR_IntensMean",
        INTENS_MIN = "AR_IntensMin",
        INTENS_SKEW = "AR_IntensSkew",
        INTENS_TOTAL = "AR_IntensTotal",
        INTENS_UNIT = "AR_IntensUnit",
        INTENS_VAR = "AR_IntensVar",
        MC_INTOSH_CLS = "AR_McIntoshCls",
        MT_WILSON_CLS = "AR_MtWilsonCls",
        NOAA_NUM = "AR_NOAANum",
        NOAA_CLASS = "AR_NOAAclass",
        NUM_SPOTS = "AR_NumSpots",
        PENUMBRA_CLS = "AR_PenumbraCls",
        POLARITY = "AR_Polarity",
        SPOT_AREA_RAW = "AR_SpotAreaRaw",
        SPOT_AREA_RAW_UNCERT = "AR_SpotAreaRawUncert",
        SPOT_AREA_RAW_UNIT = "AR_SpotAreaRawUnit",
        SPOT_AREA_REPR = "AR_SpotAreaRepr",
        SPOT_AREA_REPR_UNCERT = "AR_SpotAreaReprUncert",
        SPOT_AREA_REPR_UNIT = "AR_SpotAreaReprUnit",
        ZURICH_CLS = "AR_ZurichCls",
    }
}

field_category! {
    /// Coronal mass ejections.
    ce => "CE", event = "ce" {
        ACCEL = "CME_Accel",
        ACCEL_UNCERT = "CME_AccelUncert",
        ACCEL_UNIT = "CME_AccelUnit",
        ANGULAR_WIDTH = "CME_AngularWidth",
        ANGULAR_WIDTH_UNIT = "CME_AngularWidthUnit",
        MASS = "CME_Mass",
        MASS_UNCERT = "CME_MassUncert",
        MASS_UNIT = "CME_MassUnit",
        RADIAL_LIN_VEL = "CME_RadialLinVel",
        RADIAL_LIN_VEL_MAX = "CME_RadialLinVelMax",
        RADIAL_LIN_VEL_MIN = "CME_RadialLinVelMin",
        RADIAL_LIN_VEL_STDDEV = "CME_RadialLinVelStddev",
        RADIAL_LIN_VEL_UNCERT = "CME_RadialLinVelUncert",
        RADIAL_LIN_VEL_UNIT = "CME_RadialLinVelUnit",
    }
}

field_category! {
    /// Coronal dimmings.
    cd => "CD", event = "cd" {
        AREA = "CD_Area",
        AREA_UNCERT = "CD_AreaUncert",
        AREA_UNIT = "CD_AreaUnit",
        MASS = "CD_Mass",
        MASS_UNCERT = "CD_MassUncert",
        MASS_UNIT = "CD_MassUnit",
        VOLUME = "CD_Volume",
        VOLUME_UNCERT = "CD_VolumeUncert",
        VOLUME_UNIT = "CD_VolumeUnit",
    }
}

field_category! {
    /// Filaments.
    fi => "FI", event = "fi" {
        BARBS_L = "FI_BarbsL",
        BARBS_R = "FI_BarbsR",
        BARBS_TOT = "FI_BarbsTot",
        CHIRALITY = "FI_Chirality",
        LENGTH = "FI_Length",
        LENGTH_UNIT = "FI_LengthUnit",
        TILT = "FI_Tilt",
    }
}

field_category! {
    /// Flares.
    fl => "FL", event = "fl" {
        E_FOLD_TIME = "FL_EFoldTime",
        E_FOLD_TIME_UNIT = "FL_EFoldTimeUnit",
        FLUENCE = "FL_Fluence",
        FLUENCE_UNIT = "FL_FluenceUnit",
        GOES_CLS = "FL_GOESCls",
        PEAK_EM = "FL_PeakEM",
        PEAK_EM_UNIT = "FL_PeakEMUnit",
        PEAK_FLUX = "FL_PeakFlux",
        PEAK_FLUX_UNIT = "FL_PeakFluxUnit",
        PEAK_TEMP = "FL_PeakTemp",
        PEAK_TEMP_UNIT = "FL_PeakTempUnit",
    }
}

field_category! {
    /// Sunspots.
    ss => "SS", event = "ss" {
        SPIN_RATE = "SS_SpinRate",
        SPIN_RATE_UNIT = "SS_SpinRateUnit",
    }
}

field_category! {
    /// Emerging flux.
    ef => "EF", event = "ef" {
        ASPECT_RATIO = "EF_AspectRatio",
        AXIS_LENGTH = "EF_AxisLength",
        AXIS_ORIENTATION = "EF_AxisOrientation",
        AXIS_ORIENTATION_UNIT = "EF_AxisOrientationUnit",
        FLUX_UNIT = "EF_FluxUnit",
        LENGTH_UNIT = "EF_LengthUnit",
        NEG_EQUIV_RADIUS = "EF_NegEquivRadius",
        NEG_PEAK_FLUX_ONSET_RATE = "EF_NegPeakFluxOnsetRate",
        ONSET_RATE_UNIT = "EF_OnsetRateUnit",
        POS_EQUIV_RADIUS = "EF_PosEquivRadius",
        POS_PEAK_FLUX_ONSET_RATE = "EF_PosPeakFluxOnsetRate",
        PROXIMITY_RATIO = "EF_ProximityRatio",
        SUM_NEG_SIGNED_FLUX = "EF_SumNegSignedFlux",
        SUM_POS_SIGNED_FLUX = "EF_SumPosSignedFlux",
    }
}

field_category! {
    /// Sigmoids.
    sg => "SG", event = "sg" {
        ASPECT_RATIO = "SG_AspectRatio",
        CHIRALITY = "SG_Chirality",
        MEAN_CONTRAST = "SG_MeanContrast",
        ORIENTATION = "SG_Orientation",
        PEAK_CONTRAST = "SG_PeakContrast",
        SHAPE = "SG_Shape",
    }
}

field_category! {
    /// Coronal cavities.
    cc => "CC", event = "cc" {
        AXIS_UNIT = "CC_AxisUnit",
        MAJOR_AXIS = "CC_MajorAxis",
        MINOR_AXIS = "CC_MinorAxis",
        TILT_ANGLE_MAJOR_FROM_RADIAL = "CC_TiltAngleMajorFromRadial",
        TILT_ANGLE_UNIT = "CC_TiltAngleUnit",
    }
}

field_category! {
    /// Topological objects.
    to => "TO", event = "to" {
        SHAPE = "TO_Shape",
    }
}

field_category! {
    /// Wave displacement and wavelength parameters.
    wave => "Wave" {
        DISPL_MAX_AMPL = "WaveDisplMaxAmpl",
        DISPL_MIN_AMPL = "WaveDisplMinAmpl",
        DISPL_UNIT = "WaveDisplUnit",
        L_MAX_POWER = "WavelMaxPower",
        L_MAX_POWER_UNCERT = "WavelMaxPowerUncert",
        L_MAX_RANGE = "WavelMaxRange",
        L_MIN_RANGE = "WavelMinRange",
        L_UNIT = "WavelUnit",
    }
}

field_category! {
    veloc => "Veloc" {
        MAX_AMPL = "VelocMaxAmpl",
        MAX_POWER = "VelocMaxPower",
        MAX_POWER_UNCERT = "VelocMaxPowerUncert",
        MIN_AMPL = "VelocMinAmpl",
        UNIT = "VelocUnit",
    }
}

field_category! {
    freq => "Freq" {
        MAX_RANGE = "FreqMaxRange",
        MIN_RANGE = "FreqMinRange",
        PEAK_POWER = "FreqPeakPower",
        UNIT = "FreqUnit",
    }
}

field_category! {
    intens => "Intens" {
        MAX_AMPL = "IntensMaxAmpl",
        MIN_AMPL = "IntensMinAmpl",
        UNIT = "IntensUnit",
    }
}

field_category! {
    area => "Area" {
        AT_DISK_CENTER = "Area_AtDiskCenter",
        AT_DISK_CENTER_UNCERT = "Area_AtDiskCenterUncert",
        RAW = "Area_Raw",
        UNCERT = "Area_Uncert",
        UNIT = "Area_Unit",
    }
}

field_category! {
    /// Bounding box corners.
    bound_box => "BoundBox" {
        C1_LL = "BoundBox_C1LL",
        C1_UR = "BoundBox_C1UR",
        C2_LL = "BoundBox_C2LL",
        C2_UR = "BoundBox_C2UR",
    }
}

field_category! {
    /// Boundary chain code parameters.
    bound => "Bound" {
        OX_C1_LL = "BoundBox_C1LL",
        OX_C1_UR = "BoundBox_C1UR",
        OX_C2_LL = "BoundBox_C2LL",
        OX_C2_UR = "BoundBox_C2UR",
        CC_NSTEPS = "Bound_CCNsteps",
        CC_START_C1 = "Bound_CCStartC1",
        CC_START_C2 = "Bound_CCStartC2",
    }
}

field_category! {
    /// Observation metadata.
    obs => "OBS" {
        CHANNEL_ID = "OBS_ChannelID",
        DATA_PREP_URL = "OBS_DataPrepURL",
        FIRST_PROCESSING_DATE = "OBS_FirstProcessingDate",
        INCLUDES_NRT = "OBS_IncludesNRT",
        INSTRUMENT = "OBS_Instrument",
        LAST_PROCESSING_DATE = "OBS_LastProcessingDate",
        LEVEL_NUM = "OBS_LevelNum",
        MEAN_WAVEL = "OBS_MeanWavel",
        OBSERVATORY = "OBS_Observatory",
        TITLE = "OBS_Title",
        WAVEL_UNIT = "OBS_WavelUnit",
    }
}

field_category! {
    skel => "Skel" {
        CURVATURE = "Skel_Curvature",
        NSTEPS = "Skel_Nsteps",
        START_C1 = "Skel_StartC1",
        START_C2 = "Skel_StartC2",
    }
}

field_category! {
    /// Feature recognition method metadata.
    frm => "FRM" {
        CONTACT = "FRM_Contact",
        HUMAN_FLAG = "FRM_HumanFlag",
        IDENTIFIER = "FRM_Identifier",
        INSTITUTE = "FRM_Institute",
        NAME = "FRM_Name",
        PARAM_SET = "FRM_ParamSet",
        SPECIFIC_ID = "FRM_SpecificID",
        URL = "FRM_URL",
        VERSION_NUMBER = "FRM_VersionNumber",
    }
}

field_category! {
    /// Generic event properties.
    event => "Event" {
        C1_ERROR = "Event_C1Error",
        C2_ERROR = "Event_C2Error",
        CLIPPED_SPATIAL = "Event_ClippedSpatial",
        CLIPPED_TEMPORAL = "Event_ClippedTemporal",
        COORD1 = "Event_Coord1",
        COORD2 = "Event_Coord2",
        COORD3 = "Event_Coord3",
        COORD_SYS = "Event_CoordSys",
        COORD_UNIT = "Event_CoordUnit",
        MAP_URL = "Event_MapURL",
        MASK_URL = "Event_MaskURL",
        NPIXELS = "Event_Npixels",
        PIXEL_UNIT = "Event_PixelUnit",
        PROBABILITY = "Event_Probability",
        TEST_FLAG = "Event_TestFlag",
        TYPE = "Event_Type",
    }
}

field_category! {
    outflow => "Outflow" {
        LENGTH = "Outflow_Length",
        LENGTH_UNIT = "Outflow_LengthUnit",
        OPENING_ANGLE = "Outflow_OpeningAngle",
        SPEED = "Outflow_Speed",
        SPEED_UNIT = "Outflow_SpeedUnit",
        TRANS_SPEED = "Outflow_TransSpeed",
        WIDTH = "Outflow_Width",
        WIDTH_UNIT = "Outflow_WidthUnit",
    }
}

field_category! {
    misc => "Misc" {
        KB_ARCHIVIST = "KB_Archivist",
        MAX_MAG_FIELD_STRENGTH = "MaxMagFieldStrength",
        MAX_MAG_FIELD_STRENGTH_UNIT = "MaxMagFieldStrengthUnit",
        OSCILL_N_PERIODS = "OscillNPeriods",
        OSCILL_N_PERIODS_UNCERT = "OscillNPeriodsUncert",
        PEAK_POWER = "PeakPower",
        PEAK_POWER_UNIT = "PeakPowerUnit",
        RASTER_SCAN_TYPE = "RasterScanType",
    }
}

/// Every category, in catalog order.
pub const CATEGORIES: &[Category] = &[
    ar::CATEGORY,
    ce::CATEGORY,
    cd::CATEGORY,
    fi::CATEGORY,
    fl::CATEGORY,
    ss::CATEGORY,
    ef::CATEGORY,
    sg::CATEGORY,
    cc::CATEGORY,
    to::CATEGORY,
    wave::CATEGORY,
    veloc::CATEGORY,
    freq::CATEGORY,
    intens::CATEGORY,
    area::CATEGORY,
    bound_box::CATEGORY,
    bound::CATEGORY,
    obs::CATEGORY,
    skel::CATEGORY,
    frm::CATEGORY,
    event::CATEGORY,
    outflow::CATEGORY,
    misc::CATEGORY,
];
